use std::ffi::CStr;
use std::mem;
use std::os::raw::c_char;
use std::ptr;

/// Substituted whenever a uid/gid has no resolvable name.
pub const UNKNOWN_LABEL: &str = "<unknown>";

const INITIAL_BUF_LEN: usize = 1024;
const MAX_BUF_LEN: usize = 128 * 1024;

/// Resolve a numeric user id to its symbolic name.
///
/// Lookup failure of any kind falls back to [`UNKNOWN_LABEL`]; the report
/// never fails on an unresolvable id.
pub fn user_name(uid: u32) -> String {
    let mut buf: Vec<u8> = vec![0; INITIAL_BUF_LEN];
    loop {
        let mut pwd: libc::passwd = unsafe { mem::zeroed() };
        let mut result: *mut libc::passwd = ptr::null_mut();
        let rc = unsafe {
            libc::getpwuid_r(
                uid as libc::uid_t,
                &mut pwd,
                buf.as_mut_ptr() as *mut c_char,
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            return UNKNOWN_LABEL.to_owned();
        }
        // pw_name points into `buf`, valid until the next loop iteration.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return name.to_string_lossy().into_owned();
    }
}

/// Resolve a numeric group id to its symbolic name. Same fallback contract
/// as [`user_name`].
pub fn group_name(gid: u32) -> String {
    let mut buf: Vec<u8> = vec![0; INITIAL_BUF_LEN];
    loop {
        let mut grp: libc::group = unsafe { mem::zeroed() };
        let mut result: *mut libc::group = ptr::null_mut();
        let rc = unsafe {
            libc::getgrgid_r(
                gid as libc::gid_t,
                &mut grp,
                buf.as_mut_ptr() as *mut c_char,
                buf.len(),
                &mut result,
            )
        };

        if rc == libc::ERANGE && buf.len() < MAX_BUF_LEN {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() {
            return UNKNOWN_LABEL.to_owned();
        }
        let name = unsafe { CStr::from_ptr(grp.gr_name) };
        return name.to_string_lossy().into_owned();
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
