/// Read-only view of one inbound request, as seen by authorization.
///
/// Implementations are supplied by the surrounding proxy; authorization only
/// reads them for the duration of a single evaluation.
pub trait Attributes: Send + Sync {
    /// The authenticated principal, if the request carries one.
    fn user(&self) -> Option<&dyn User>;

    fn verb(&self) -> &str;

    fn namespace(&self) -> &str;

    fn api_group(&self) -> &str;

    fn resource(&self) -> &str;

    fn subresource(&self) -> &str;

    /// The name of the object targeted by the request, if any.
    fn name(&self) -> &str;

    /// The URL path of a non-resource request.
    fn path(&self) -> &str;

    /// Distinguishes API resource requests from raw URL path requests.
    fn is_resource_request(&self) -> bool;
}

/// An authenticated request principal.
pub trait User: Send + Sync {
    fn name(&self) -> &str;
}
