pub mod u501_generate_working_hours;
