// Gridia services
// Cross-cutting functionality that is not bookmark state.

pub mod license_registry;
