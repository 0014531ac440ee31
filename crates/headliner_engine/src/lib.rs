//! Headliner engine: news API IO pipeline and view-model orchestration.
mod api;
mod biometric;
mod dto;
mod headlines_vm;
mod mapper;
mod preload;
mod repository;
mod splash_vm;
mod usecase;

pub use api::{ApiError, ApiSettings, NewsApi, ReqwestNewsApi};
pub use biometric::{BiometricGate, UnsupportedBiometricGate};
pub use dto::{HeadlineDto, HeadlineResponseDto, SourceDto};
pub use headlines_vm::HeadlinesViewModel;
pub use mapper::{format_published_at, response_to_domain, to_domain};
pub use preload::{HttpImagePreloader, ImagePreloader};
pub use repository::{HeadlineRepository, NewsHeadlineRepository};
pub use splash_vm::SplashViewModel;
pub use usecase::GetHeadlines;
