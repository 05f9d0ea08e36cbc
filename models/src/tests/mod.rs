mod client_config;
