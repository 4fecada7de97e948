// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: outbound adapters (AI gateway)
// - presentation: HTTP handlers and routing
// - application: ports, use cases and shared services
// - domain: tag normalisation

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
