mod drag_tracker_tests;
