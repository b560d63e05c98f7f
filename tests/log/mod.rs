mod log_oneline_lists_id_and_message;
