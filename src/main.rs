#[cfg(target_arch = "wasm32")]
pub fn main() {
    petfinder_web::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
