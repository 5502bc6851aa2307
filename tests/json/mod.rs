mod print_json_that_reads_back_into_the_model;
