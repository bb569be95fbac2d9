//! Answer an access request: granted iff the store root is readable.

use upnext_core::source::AccessDecision;
use upnext_core::source::protocol::Response;

use crate::store;

pub fn handle() -> String {
    let root = store::root();

    // A denial is data, not a protocol error: the CLI surfaces the reason.
    match std::fs::read_dir(&root) {
        Ok(_) => Response::success(AccessDecision {
            granted: true,
            reason: None,
        }),
        Err(e) => Response::success(AccessDecision {
            granted: false,
            reason: Some(format!("{} is not readable: {}", root.display(), e)),
        }),
    }
}
