mod adding_a_missing_file_is_reported;
mod tracking_a_file_twice_keeps_one_entry;
