mod show_char_diff_of_two_lines;
