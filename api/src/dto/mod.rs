pub mod verification;

pub use verification::{
    validation_failure, BindRequestDto, StatusRequestDto, VerificationRequestDto,
};
