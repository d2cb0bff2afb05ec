//! Role-based navigation
//!
//! The console menu is derived from the session's capabilities, so a new
//! role only needs a capability set to get the right sections.

use hospeda_core::Capabilities;

use crate::dto::{MenuItem, SessionResponse, SessionUserResponse};

use super::session::Session;

const MENU: [(Capabilities, MenuItem); 5] = [
    (
        Capabilities::VIEW_ROOMS,
        MenuItem {
            key: "rooms",
            label: "Rooms",
            path: "/rooms",
        },
    ),
    (
        Capabilities::MANAGE_RESERVATIONS,
        MenuItem {
            key: "reservations",
            label: "Reservations",
            path: "/reservations",
        },
    ),
    (
        Capabilities::MANAGE_INVOICES,
        MenuItem {
            key: "invoices",
            label: "Invoices",
            path: "/invoices",
        },
    ),
    (
        Capabilities::MANAGE_GUESTS,
        MenuItem {
            key: "guests",
            label: "Guests",
            path: "/guests",
        },
    ),
    (
        Capabilities::MANAGE_USERS,
        MenuItem {
            key: "users",
            label: "Users",
            path: "/users",
        },
    ),
];

/// Navigation service
pub struct NavigationService;

impl NavigationService {
    /// Menu entries visible with `capabilities`, in display order
    pub fn menu(capabilities: Capabilities) -> Vec<MenuItem> {
        MENU.iter()
            .filter(|(required, _)| capabilities.has(*required))
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Describe the current session for the console shell
    pub fn describe(session: &Session) -> SessionResponse {
        SessionResponse {
            user: SessionUserResponse::from(session),
            capabilities: session.capabilities(),
            menu: Self::menu(session.capabilities()),
            landing: session.role().landing().to_string(),
            expires_at: session.expires_at(),
        }
    }
}
