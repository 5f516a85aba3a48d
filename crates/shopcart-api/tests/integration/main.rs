//! Integration tests for shopcart-api
//!
//! Uses wiremock to simulate the storefront backend and verifies
//! end-to-end behavior of the ApiClient: catalog queries, cart calls,
//! error mapping and observer notifications.

mod common;

mod test_cart;
mod test_catalog;
mod test_observers;
