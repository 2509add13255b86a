mod backtracking;
mod forward_checking;
mod generalised_arc_consistency;
