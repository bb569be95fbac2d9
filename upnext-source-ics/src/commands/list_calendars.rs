//! List the calendars the store serves.

use upnext_core::Calendar;
use upnext_core::source::protocol::Response;

use crate::store;

pub fn handle() -> String {
    match store::calendar_names(&store::root()) {
        Ok(names) => {
            let calendars: Vec<Calendar> = names.into_iter().map(Calendar::new).collect();
            Response::success(calendars)
        }
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}
