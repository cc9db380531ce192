mod dog_loader;
mod find_pet;
mod page_transition;
mod side_dog;

pub(crate) use dog_loader::{DogLoader, LoaderSize, RouteLoader};
pub(crate) use find_pet::FindPetAnimation;
pub(crate) use page_transition::PageTransition;
pub(crate) use side_dog::{SideDogAnimation, SidePosition};
