use crate::server::{
    error::{resource::ResourceError, AppError},
    model::favorite::ReplaceFavoritesParams,
    service::favorite::FavoriteService,
};
use test_utils::{builder::TestBuilder, factory};

mod get_for_user;
mod replace;
