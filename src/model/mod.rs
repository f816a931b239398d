/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// OAuth token models
pub mod auth;
/// Request descriptors and endpoint tables
pub mod endpoint;
/// Request dispatcher
pub mod http;
/// Query string and OData filter construction
pub mod query;
/// Request parameter models
pub mod requests;
/// Response models
pub mod responses;
