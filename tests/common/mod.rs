pub mod day_server;
