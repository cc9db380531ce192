//! Route path constants shared by pages, guards, and navigation.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const DASHBOARD: &str = "/dashboard";
