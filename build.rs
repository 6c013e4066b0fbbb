macro_rules! printinfo {
    ($($tokens: tt)*) => {
        println!("cargo:warning=\r\x1b[36;1m   {}", format!($($tokens)*))
    }
}

fn main() {
    config_ipopt_link();
}

fn config_ipopt_link() {
    // IPOPT_LIB_DIR may point to a directory containing libipopt
    // when the library is not installed on the default link path.
    println!("cargo:rerun-if-env-changed=IPOPT_LIB_DIR");

    if cfg!(not(feature = "ipopt")) {
        return;
    }

    match std::env::var("IPOPT_LIB_DIR") {
        Ok(dir) if !dir.is_empty() => {
            println!("cargo:rustc-link-search=native={}", dir);
            printinfo!("Ipopt: linking with libipopt from {}", dir);
        }
        _ => {
            printinfo!("Ipopt: linking with system libipopt");
        }
    }
}
