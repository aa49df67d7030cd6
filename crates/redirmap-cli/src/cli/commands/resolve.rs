//! `redirmap resolve <host>` – show what the front door would do for a host.

use redirmap_core::{Resolution, Resolver};

pub fn run_resolve(resolver: &Resolver, host: &str, delay_secs: u32) {
    match resolver.lookup(host) {
        Resolution::Redirect(target) => {
            println!("{host} -> {target} (redirect after {delay_secs}s)")
        }
        Resolution::Unconfigured => println!("{host}: domain not configured"),
        Resolution::Misconfigured => println!("{host}: rule has no usable target"),
    }
}
