pub mod io_util;
