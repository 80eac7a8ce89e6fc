use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogUseCase, DeleteBlogUseCase, GetBlogsUseCase, GetSingleBlogUseCase,
    UpdateBlogUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub create: Arc<dyn CreateBlogUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetBlogsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleBlogUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateBlogUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteBlogUseCase + Send + Sync>,
}
