pub mod dpss_test;
