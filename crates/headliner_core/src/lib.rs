//! Headliner core: pure domain model, state machine contracts, and filter helpers.
mod effect;
mod event;
mod filter;
mod model;
mod result;
mod route;
mod state;

pub use effect::{HeadlinesEffect, SplashEffect};
pub use event::{HeadlinesEvent, SplashEvent};
pub use filter::filter_headlines;
pub use model::{Headline, Source};
pub use result::{AppError, AppResult};
pub use route::Route;
pub use state::HeadlinesState;
