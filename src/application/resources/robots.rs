use crate::error::AppError;
use crate::model::endpoint::EntitySet;
use crate::model::http::HttpClient;
use crate::model::query::quote;
use crate::model::requests::RobotFilter;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const ROBOTS: EntitySet = EntitySet::new("Robots");

/// Client for `/odata/Robots`
pub struct RobotsClient {
    http_client: Arc<HttpClient>,
}

impl RobotsClient {
    /// Creates a new robots client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Gets robots
    pub async fn get(&self, filter: &RobotFilter<'_>) -> Result<Value, AppError> {
        self.http_client
            .send(ROBOTS.list().with_query(filter.to_query()))
            .await
    }

    /// Gets one robot
    pub async fn get_by_id(&self, robot_id: i64) -> Result<Value, AppError> {
        self.http_client.send(ROBOTS.get(robot_id)).await
    }

    /// Creates a robot
    pub async fn create<B: Serialize + ?Sized>(&self, robot: &B) -> Result<Value, AppError> {
        self.http_client.send(ROBOTS.create().with_json(robot)?).await
    }

    /// Replaces a robot
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        robot_id: i64,
        robot: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(ROBOTS.update(robot_id).with_json(robot)?)
            .await
    }

    /// Deletes a robot
    pub async fn delete(&self, robot_id: i64) -> Result<(), AppError> {
        self.http_client.dispatch(ROBOTS.delete(robot_id)).await
    }

    /// Gets the robots that can run the given process
    pub async fn get_robots_for_process(&self, process_id: &str) -> Result<Value, AppError> {
        self.http_client
            .send(ROBOTS.function(&format!(
                "GetRobotsForProcess(processId={})",
                quote(process_id)
            )))
            .await
    }
}
