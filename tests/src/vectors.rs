//! Known multiples of the K-233 base point, big-endian hex

/// x-coordinate of `2G`
pub const K233_2G_X: &str = "1a96a52534c02824c92539163f2ed13243feb57b45adbe4cf7ec61957f6";
/// y-coordinate of `2G`
pub const K233_2G_Y: &str = "1f9d11ccd5ff37c021bb64dff8df25af3ebc5c3f9bfc5cb17b2203703a8";
/// x-coordinate of `3G`
pub const K233_3G_X: &str = "4656e0aabbe341407715ca4a7fac287b41baa1f789c29bfa27e53a7a46";
/// y-coordinate of `3G`
pub const K233_3G_Y: &str = "f79a7245fba513df787a64c618e97ebcc078638ebaaa562e9862bc00ce";
/// x-coordinate of `5G`
pub const K233_5G_X: &str = "1e6203d117ffe2c1facb632dcb11d665f96701728b7854d4d562aec4c81";
/// x-coordinate of `6G`
pub const K233_6G_X: &str = "e15ae1d3e035c8d4653ce24cb569e01a62c9cda208cc698c4eb3f3c87a";
/// y-coordinate of `6G`
pub const K233_6G_Y: &str = "160f13ec3651671f230b4f0bdaaef51bfac70d8e28bac49d2cb0ed2b9a8";
