use crate::error::AppError;
use crate::model::endpoint::Endpoint;
use crate::model::http::HttpClient;
use crate::model::query::QueryParams;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const CANCEL_TEST_CASE: Endpoint = Endpoint::post("/api/TestAutomation/CancelTestCaseExecution");
const CANCEL_TEST_SET: Endpoint = Endpoint::post("/api/TestAutomation/CancelTestSetExecution");
const CREATE_TEST_SET: Endpoint =
    Endpoint::post("/api/TestAutomation/CreateTestSetForReleaseVersion");
const ASSERTION_SCREENSHOT: Endpoint =
    Endpoint::get("/api/TestAutomation/GetAssertionScreenshot");
const PACKAGE_INFO: Endpoint =
    Endpoint::get("/api/TestAutomation/GetPackageInfoByTestCaseUniqueId");
const START_TEST_SET: Endpoint = Endpoint::post("/api/TestAutomation/StartTestSetExecution");

/// Client for `/api/TestAutomation`
pub struct TestAutomationClient {
    http_client: Arc<HttpClient>,
}

impl TestAutomationClient {
    /// Creates a new test automation client
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Cancels a test case execution
    pub async fn cancel_test_case_execution(
        &self,
        test_case_execution_id: i64,
    ) -> Result<(), AppError> {
        self.http_client
            .dispatch(
                CANCEL_TEST_CASE
                    .request()
                    .with_param("testCaseExecutionId", test_case_execution_id),
            )
            .await
    }

    /// Cancels a test set execution
    pub async fn cancel_test_set_execution(
        &self,
        test_set_execution_id: i64,
    ) -> Result<(), AppError> {
        self.http_client
            .dispatch(
                CANCEL_TEST_SET
                    .request()
                    .with_param("testSetExecutionId", test_set_execution_id),
            )
            .await
    }

    /// Creates a test set with source type API, returning its id
    pub async fn create_test_set<B: Serialize + ?Sized>(
        &self,
        test_set: &B,
    ) -> Result<Value, AppError> {
        self.http_client
            .send(CREATE_TEST_SET.request().with_json(test_set)?)
            .await
    }

    /// Downloads the screenshot taken for a test case assertion
    pub async fn get_assertion_screenshot(
        &self,
        test_case_assertion_id: i64,
    ) -> Result<Vec<u8>, AppError> {
        self.http_client
            .send_raw(
                ASSERTION_SCREENSHOT
                    .request()
                    .with_param("testCaseAssertionId", test_case_assertion_id),
            )
            .await
    }

    /// Gets the package info of a test case
    pub async fn get_package_info(
        &self,
        test_case_unique_id: &str,
        package_identifier: &str,
    ) -> Result<Value, AppError> {
        let query = QueryParams::new()
            .with("testCaseUniqueId", test_case_unique_id)
            .with("packageIdentifier", package_identifier);
        self.http_client
            .send(PACKAGE_INFO.request().with_query(query))
            .await
    }

    /// Starts a test set execution, returning the execution id
    ///
    /// `trigger_type` is usually `Manual`; either `test_set_id` or
    /// `test_set_key` identifies the test set.
    pub async fn start_test_set_execution(
        &self,
        test_set_id: Option<i64>,
        test_set_key: Option<&str>,
        trigger_type: &str,
    ) -> Result<Value, AppError> {
        info!("Starting test set execution ({})", trigger_type);
        let query = QueryParams::new()
            .with("triggerType", trigger_type)
            .with_opt("testSetId", test_set_id)
            .with_text("testSetKey", test_set_key);
        self.http_client
            .send(START_TEST_SET.request().with_query(query))
            .await
    }
}
