mod work_tree_from_environment;
