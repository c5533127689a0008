//! Validator module containing the validation logic, its policy and results.
//!
//! - `validator` - the [`Validator`] orchestrating probe, checks and remainder
//! - `builder` - [`ValidatorBuilder`] for configuring the default reqwest transport
//! - `policy` - the [`Policy`] describing what is accepted
//! - `result` - the [`ValidationResult`] returned by every validation
//!
//! # Examples
//!
//! ```rust,no_run
//! use fastimage::{ImageFormat, Policy, ValidatorBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let validator = ValidatorBuilder::new().build()?;
//! let policy = Policy::new()
//!     .with_formats([ImageFormat::Jpeg, ImageFormat::Webp])
//!     .with_max_bytes(2 * 1024 * 1024);
//!
//! let result = validator.validate("https://example.com/avatar", &policy).await;
//! if result.is_valid() {
//!     println!("looks like a {:?}", result.format());
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod policy;
pub mod result;
pub mod validator;

pub use builder::ValidatorBuilder;
pub use policy::Policy;
pub use result::ValidationResult;
pub use validator::Validator;
