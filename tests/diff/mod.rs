mod collapse_unchanged_lines_far_from_changes;
mod honor_size_limits_from_environment;
mod offload_large_inputs_without_changing_output;
mod reject_inputs_over_combined_limit;
mod reject_missing_file;
mod reject_unsupported_file_type;
mod show_diff_for_single_changed_line;
mod show_no_differences_for_identical_files;
