mod print_line_counts_and_stats;
