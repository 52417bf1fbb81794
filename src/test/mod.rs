mod refresher;
