pub mod shared {
    pub mod errors;
    pub mod infrastructure {
        pub mod dataset_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
        }
        pub mod use_cases {
            pub mod ingest_event {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod index;
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
