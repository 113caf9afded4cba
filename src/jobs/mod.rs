pub mod ipt_refresh;
