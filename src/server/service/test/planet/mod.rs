use crate::server::{error::AppError, service::planet::PlanetService};
use test_utils::{builder::TestBuilder, factory};

mod delete;
