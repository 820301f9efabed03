// orbit-core-client/orbit-core-client
//
// Copyright: 2025, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_providers::{NanoIdProvider, UuidIdProvider};
pub use system_time_provider::SystemTimeProvider;

mod id_providers;
mod system_time_provider;
