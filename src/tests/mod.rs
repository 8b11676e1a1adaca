mod utils;

mod render_tests;
