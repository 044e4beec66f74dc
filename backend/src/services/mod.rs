//! Business logic services for the Franchise NeXus backend

pub mod application;
pub mod auth;
pub mod business;
pub mod franchise;
pub mod token;
pub mod user;

pub use application::ApplicationService;
pub use auth::AuthService;
pub use business::BusinessService;
pub use franchise::FranchiseService;
pub use token::TokenService;
pub use user::UserService;
