//! Router-level tests driven through `tower::ServiceExt::oneshot`.

mod landing_tests;
mod profile_tests;
mod test_utils;
