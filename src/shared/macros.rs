/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a result or aborts the process with a fatal diagnostic and exit status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("Fatal error! {}", e);
                std::process::exit(1);
            }
        }
    };
}
