pub mod delete_project_request;
pub mod delete_response;
pub mod project_list_response;
pub mod projects;
pub mod submit_project_request;
pub mod submit_project_response;
