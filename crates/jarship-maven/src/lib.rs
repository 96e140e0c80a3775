//! Maven repository protocol: repository selection and layout, POM
//! rendering, checksum sidecars, signing, authentication, and upload.

pub mod auth;
pub mod checksum;
pub mod pom;
pub mod publish;
pub mod repository;
pub mod signing;
