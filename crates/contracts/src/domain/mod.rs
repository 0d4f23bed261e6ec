pub mod a001_ad_request;
