/// Handles an incoming configuration request (see
/// [`moodtrack_bridge::MessageToBackend::ConfigurationRequest`]).
pub(crate) fn handle_config_request(context: &mut crate::AppContext) {
    let config = context.state.config.clone();
    context.send(moodtrack_bridge::MessageFromBackend::ConfigurationResponse(config));
}
