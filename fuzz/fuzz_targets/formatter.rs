#![no_main]

use std::sync::Arc;

use constlabel::{
    labels::{format_label, group_prefix, Dispatcher, GroupCache},
    metadata::TypeBuilder,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    let prefix = group_prefix(name);
    let _ = format_label(&prefix, name);

    if let Ok(owner) = TypeBuilder::new("Fuzz").constant(name, 1).build() {
        let dispatcher = Dispatcher::with_cache(Arc::new(GroupCache::new()));
        let _ = dispatcher.resolve(&owner, name, &[]);
    }
});
