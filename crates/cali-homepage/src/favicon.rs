//! Embedded site icon

use base64::{Engine, engine::general_purpose::STANDARD};
use bytes::Bytes;
use tracing::warn;

/// 32x32 PNG, base64-encoded
const FAVICON_PNG_BASE64: &str = concat!(
    "iVBORw0KGgoAAAANSUhEUgAAACAAAAAgCAYAAABzenr0AAAACXBIWXMAAAABAAAAAQBPJcTWAAAAAXNSR0IB2cksfwAAACBj",
    "SFJNAAB6JgAAgIQAAPoAAACA6AAAdTAAAOpgAAA6mAAAF3CculE8AAAABGdBTUEAALGPC/xhBQAACZFJREFUeJylV/lTm+cR",
    "FvhsbYODIYhDQgghcR8S9yUEOtAJwtxCEvdhjhhs4wsDxhc+Q2xsk3h8EN92TGzA1PZkXLfJTFt30njaXzpt/4JMO9N22kln",
    "3MnTfV+Jox3S2s03s/PBq0/fPrv77LMrgeAtLx8fX0FocGBBuHBL+aZNG0Pe9vvf+0qVhx5vMyag25oIa57iD+9s9hO/yfd8",
    "V63m9r2uUGFQRpsxFqMOJU61ZON4czbUKRG/S4gKPZ0QFXJIGv5uvVQU7EyIFu+UikNqN/v7iVevWStQRAT3qpNEL/ITRJ8n",
    "yUVj/n5+wf8XgDiZuLPfngJHQQQsynfRZYrB7ooUHHJmoqlIil5LHIZq07j1WJNQW6j4s04l/bLXEo+PeotwqjkHvbZ4aNLl",
    "M1TMtwcQEyWuM6eFozpXhIlONR4OleLJ4XJMH7Di3j4zHh+040ejZZgne0rnY+4MdBtkuD5gQoMmCh0GOT4ZNIFlURwu1L6V",
    "87Xr1v0gK150r8cch9t7TOTIjtnhUm5zI2X8/mjIhhmvsbP7BOrmgJEyFgl1bABMKUG42K3Grq0pUESG9r6x8/Xr1/+wIDni",
    "+VCtCvOH7JgbtuERRb3gaG6EAWH/WxcBMHtM55e3a+FUR6IkOQg2ZTDOtOWjSRcDqSjE/sYAkuTi4X57Em7tLiFn7OUWzBCI",
    "O5SJfZUp2F+djKkdOnLo/WzIA+bRAQt//lO6t2mlqMmLQEtJLPRJQqjiova9kXMf31UCbVbcg05jHA67sjF/pByPqcYzFPGD",
    "QSsuvaclYHpc6SuiLNgWnXuyYOWZeUJZm9qpR7MhBvrkYJiUQhjTRK+jRELL/wSwes06gTVb9qqemH+6S4Mvp1rx8lornp2o",
    "xAdtuagsiMbRlkIi4EIZLMtAeACwLDwkQG0UhCU9HI3GGFSzTsqQ/vG/Og/cEiDTpMdc3ufI+HZ+3IFf3WjHy6tNeDFRhydj",
    "5bi1pwTDjkxM9urwYL8F9/YavQA8xhzPDXvKwrIz0VUEp1ZOAORosShQQSVZ0fGq1at90+IlR6uKEv/aY1fi07EqvLqzDS8p",
    "+p+cd+Cz8Wr8/EoTno5VYIacMG6MOtNxuU9LDq1eh1bc3KXD9KCZusOTFfZcrz2BA2DmNihWBhAcFKAsy47ENns2umr1lCoJ",
    "Pj5gxqtbHfjF1WYC0oJfftyK5+N1VPti7KtOwYWuQi8HLIsArmwvxqVeDc8EAzFNZNxbo+SOXQYGQL4yANL3SF2q6G/FcQEo",
    "jg9EviIA1+kFX91s585fXiMAlI0X5xyYHbIuS/USBxiA852FmOo38KzM0jOMM5M9RdhVpUK9NhoNJd8BYMOGDZvLcuVfN1K9",
    "3EVRmKAoGfGY4wVjAL646OKttrzuC9FP7zdTeypJgosxTwS9NWDANnJ4Y6eBSmFCB8m2+7sA0NTyKctV/Hq0IQfn+3X4zd1t",
    "eHW7k0jYhq+IiMxYCT6/4OTRzY0s1Z1lgunBhz0aDDlUpBUluLvXhGMN2ajIDMMd4sGzw3aMNeXAqZetDIBdYcEBem1K6J96",
    "bHEYdqXhLNXzMknrObqfpbp+8VEjfjpRjxNNWeTASNJcik/2m3jdL3Rr0GWJwcWeQnx21I4POvJQmSvBQeoYpo4sI5ME0KWP",
    "XhnAmjVrfYIC30kyq1Me7azJxMFWLU5v0+AKKd/9Q+WYOV6NH5934uqAHm56STul82RrLnVCGu0J8agvikarUUGzgGYGidAO",
    "eyIMJMVX+3ScL+x8Z0UycWCFLogID9Fo0mQ/azPRizRSHNvTjKaKIlTniXGkMQsXqNXeJ/S7ic0NBk8rufRyHk0j1bSRzprI",
    "9lQpMdldiLMdBSjPEaG/LJFHzsp0b68ZLTTK3cb/4EC4MCi/plDxzXi7mlKbi+NUp/3VqajMl6GZQJhzFN+YVcGw54jhKGYO",
    "YwlEDGezyxCN7eVJGKxVottC5/R5cWIQHPkS9JHzG7sMBMDGJfxESy4H/W9tSBNvkykj8veXqYZPjmzl0jnZ7VkiDteno700",
    "E8W5yok8lWJSnyqEJS0EDprxjYZYnsoGAnCcXtxfloCK7HCqeQTa9ArihI4PI0ZM3g1EQpahegLIWpE79/H1FaTGSibY5vKU",
    "nPM5P2Tj8328rQB91jhKWRK26jJfBgYF+Zfmx/92a1YY3DqW8hgOoNUciy5rApdXN0V3oC6doi3jpGO6wJzfJ5L2EUBXsQyd",
    "tFcMVKZ6AAQG+Kea08Svp/r1fLZzIfHO9Lt7zDhA7LVnRyAyLKicPS+XhDpLaai4tKwMCl4CZqyvm4wKzocRRzqeUTDTgxbc",
    "py5hK1mTTgYLlfCIK5MUVMsDZPELVIrQW0NEqifE8OVbzTxtPdcHSuAolEKvEr/e7LcpigHw9/ffaM6M+ro0Xcg1vcHoAbBw",
    "byEQUzv0uE3pPtqYiRHqjlq1FLaMMAwSp9gSwzLDVFSwccMGoSVD/Je71ONztNM98qaeAyBAQ440GqGh/1RIQnoW+JKqCJ9s",
    "LJZ9W5svQhmVopEcNniBsOhHKUK2Me+uSuFlYuaimg/XpdG7rd6Z4TFBSPAWXb1Gxp2z2s94AcxRzS5RmuoKJShMjXxOROF7",
    "vTor+ZxTLcEFakUWqVklRC21qweEgrfiboqygbGcSOjWKeAk5yepozw7g3dfYGsdmSAiLMjdYYqjD8v4ITM2OKbpoXbqVQMx",
    "PkosrGGRS0RCfaU65h+nie3vkbjwVtJFo5parYH0gJejxKsLxHTGj/7yZJwmkWLc4kNp2Dszhj0gBKGBfi62zy+wdaH2Z0g+",
    "awojUUE9n5cknVIlRu8oy5b8/SKJyynqjLoimaf9SjyRMlFa5AP9zTLA9P4azZLZEc+kfEBlnqa1fGlrskAQGbqlob800ZOB",
    "ZZvMNO3822kRZRuMWRmCrVlivN9egA9pB+y2JcLJ6kpOWk2x6KXvMwV0l3g6gAnNxS417wDPcCrFdSLlGA2kiY588rW0Owrk",
    "EcHdfbaEZQA8s3yG+DBQoeQ1rM6PpF9CQhIQTz3ZGYueCcmJ5lyacEZKcx6dyzDens/fNedlOXsn04BzdO6mjE7SXrmUbQKQ",
    "GC060EsDZH5ZBtgHD2nvZ/VjGWByayPlq8qTeISHgDAZbaX7A5r7j/nGYwXjBmP47LKllAOgSXmMOsNEA+nGrhLv2uYtQY4q",
    "brSLOMB2u0WGknOG8gzVmkXZbI6h33kSAhCxKDwOWlT2VibTT7Ml4LPLnC43BvAkZYoFwcRu6feDBf8CWjeAEYMhKHkAAAAA",
    "SUVORK5CYII=",
);

/// Decode the embedded icon
///
/// Returns `None` if the embedded data is corrupt; the router then answers
/// icon requests with 204 No Content.
pub fn favicon_png() -> Option<Bytes> {
    decode_icon(FAVICON_PNG_BASE64)
}

fn decode_icon(encoded: &str) -> Option<Bytes> {
    match STANDARD.decode(encoded) {
        Ok(bytes) => Some(Bytes::from(bytes)),
        Err(e) => {
            warn!(error = %e, "Embedded favicon is not valid base64");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favicon_is_png() {
        let icon = favicon_png().unwrap();
        assert_eq!(&icon[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_corrupt_icon_decodes_to_none() {
        assert!(decode_icon("not base64!").is_none());
    }
}
