pub mod modules {
    pub mod course_entitlements {
        pub mod core {
            pub mod enroll_button;
            pub mod events;
            pub mod evolve;
            pub mod ports;
            pub mod session;
            pub mod session_dates;
            pub mod state;
        }
        pub mod use_cases {
            pub mod update_enroll_button {
                pub mod decide;
            }
            pub mod enroll_in_session {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod panel;
                pub mod panel_options;
            }
            pub mod outbound {
                pub mod enrollment_client_http;
                pub mod enrollment_client_in_memory;
            }
        }
    }
}

pub mod shell;
