//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod account_service;
pub mod forms;
mod token_service;

pub use account_service::{AccountManager, AccountService};
pub use forms::{
    parse_user_id, LoginRequest, LoginResponse, ProfileResponse, RegisterRequest,
    RegisterResponse, UpdateProfileRequest,
};
pub use token_service::{verify_token, AccessTokenClaims, IssuedToken, TokenError, TokenService};
