#[macro_export]
macro_rules! println_error {
    ($($arg:tt)+) => {
        print!("{} ", console::style("ERROR").on_red().bright());
        println!($($arg)+);
    };
}
