#![doc = include_str!("../README.md")]
#![allow(clippy::derive_partial_eq_without_eq)]

/// Greeting contract: `service1.Service1/SayHello`.
pub mod service1 {
    tonic::include_proto!("service1");
}

/// Data lookup contract: `service2.Service2/GetData`.
pub mod service2 {
    tonic::include_proto!("service2");
}
