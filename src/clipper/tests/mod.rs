mod intersect_node_tests;
mod t_edge_tests;
