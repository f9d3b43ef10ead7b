mod config_gets_and_sets_the_username;
