use colour::red;

pub fn print_intro() {
    println!(
        r#"
     __
    / /_  ______ ___  ___  ____
   / / / / / __ `__ \/ _ \/ __ \
  / / /_/ / / / / / /  __/ / / /
 /_/\__,_/_/ /_/ /_/\___/_/ /_/ "#
    );

    if cfg!(debug_assertions) {
        red!("\nWARNING: YOU ARE RUNNING IN DEBUG MODE. Keep in mind that everything is way slower than it should be.\n\n");
    }
}
