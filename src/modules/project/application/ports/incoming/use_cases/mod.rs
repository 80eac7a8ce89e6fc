mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod update_project;

pub use create_project::{CreateProjectUseCase, CREATE_PROJECT_FAILED, PROJECT_CREATED};
pub use delete_project::{DeleteProjectUseCase, DELETE_PROJECT_FAILED, PROJECT_DELETED};
pub use get_projects::{GetProjectsUseCase, LOAD_PROJECTS_FAILED};
pub use get_single_project::GetSingleProjectUseCase;
pub use update_project::{UpdateProjectUseCase, PROJECT_UPDATED, UPDATE_PROJECT_FAILED};

/// Where the project pages send the user after a successful submit.
pub const PROJECTS_PAGE: &str = "/dashboard/project";
