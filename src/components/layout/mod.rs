mod navbar;

pub(crate) use navbar::Navbar;
